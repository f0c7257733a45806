//! The administrator's "mark as repaired" flow.

use crate::frontend::Frontend;
use crate::MapClient;
use log::{error, info, warn};
use rp_core::{PointId, RoadApi};

/// How a repair request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The user did not confirm; nothing was sent.
    Declined,
    /// The server removed the point; points and stats were refreshed.
    Repaired,
    /// The server answered with a failure status and this message.
    Rejected(Option<String>),
    /// No usable answer from the server.
    Failed,
}

impl<A: RoadApi, F: Frontend> MapClient<A, F> {
    /// Confirm with the user, then ask the server to remove `id`.
    ///
    /// Every failure is final for this attempt; the user has to start
    /// again.
    pub async fn delete_point(&self, id: PointId) -> RepairOutcome {
        let labels = self.renderer.labels();
        if !self.frontend.confirm(labels.confirm_repair) {
            info!("Repair of point {} not confirmed", id);
            return RepairOutcome::Declined;
        }

        match self.api.delete_point(id).await {
            Ok(response) if response.is_success() => {
                info!("Point {} marked as repaired", id);
                self.frontend.alert(labels.repair_success);
                let _ = futures::join!(self.refresh_points(), self.refresh_stats());
                RepairOutcome::Repaired
            }
            Ok(response) => {
                warn!(
                    "Repair of point {} rejected: {} {:?}",
                    id, response.status, response.message
                );
                self.frontend
                    .alert(&labels.repair_error(response.message.as_deref()));
                RepairOutcome::Rejected(response.message)
            }
            Err(e) => {
                error!("Repair of point {} failed: {e}", id);
                self.frontend.alert(labels.communication_error);
                RepairOutcome::Failed
            }
        }
    }
}
