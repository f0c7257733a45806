use rp_render::Marker;

/// Lifecycle of the point layer. Failed fetches never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerState {
    Empty,
    Populated,
}

/// The markers currently on the map.
///
/// Always equal to the most recent successful fetch; replaced wholesale,
/// never diffed.
#[derive(Debug, Default)]
pub struct PointLayer {
    markers: Vec<Marker>,
    populated: bool,
}

impl PointLayer {
    pub fn state(&self) -> LayerState {
        if self.populated {
            LayerState::Populated
        } else {
            LayerState::Empty
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub(crate) fn replace(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        self.populated = true;
    }
}
