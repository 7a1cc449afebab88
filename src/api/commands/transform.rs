//! Transformation picker commands

use crate::core::transform;
use crate::shared::settings::AppSettings;
use crate::shared::types::{TransformTextRequest, TransformTextResponse, TransformationInfo};
use tracing::debug;

/// Transformations the picker should show, in display order
pub fn get_transformations(settings: &AppSettings) -> Vec<TransformationInfo> {
    settings
        .preferences
        .visible_transformations()
        .into_iter()
        .map(TransformationInfo::from)
        .collect()
}

/// Apply one transformation to the given text
pub fn transform_text(request: TransformTextRequest) -> TransformTextResponse {
    let result = transform::apply(request.transformation, &request.text);
    let changed = result != request.text;
    debug!(
        "[Transform] {} on {} bytes, changed: {}",
        request.transformation.id(),
        request.text.len(),
        changed
    );

    TransformTextResponse {
        result,
        transformation: request.transformation,
        changed,
    }
}
