use crate::error::AppError;
use crate::model::{ProjectNode, VideoStatus};
use rand::Rng;
use serde::Serialize;

/// Share of checkins where the body camera starts streaming by itself.
pub const AUTO_STREAM_SUCCESS_RATE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinResult {
    pub success: bool,
    pub message: String,
    pub video_status: VideoStatus,
    /// Package, route and segment labels of the selection.
    pub labels: Vec<String>,
}

/// Checks in to a package → route → segment selection and simulates the
/// automatic video stream start.
pub fn attempt_checkin<R: Rng>(
    tree: &[ProjectNode],
    selection: &[String],
    rng: &mut R,
) -> Result<CheckinResult, AppError> {
    if selection.len() != 3 {
        return Err(AppError::invalid_input(
            "select a project package, route and segment",
        ));
    }

    let labels = ProjectNode::resolve_path(tree, selection)
        .ok_or_else(|| AppError::invalid_input("selection is not in the project tree"))?;
    let labels = labels.into_iter().map(str::to_string).collect();

    let success = rng.random_bool(AUTO_STREAM_SUCCESS_RATE);
    tracing::debug!(success, "auto stream attempt");
    Ok(outcome(success, labels))
}

fn outcome(success: bool, labels: Vec<String>) -> CheckinResult {
    if success {
        CheckinResult {
            success,
            message: "设备已自动开启音视频回传，监管端已同步显示。".to_string(),
            video_status: VideoStatus::Online,
            labels,
        }
    } else {
        CheckinResult {
            success,
            message: "设备未响应自动推流指令，请在执法记录仪上手动开启视频。".to_string(),
            video_status: VideoStatus::Connecting,
            labels,
        }
    }
}
