use pdfium_render::prelude::*;

use crate::application::ports::FileLoaderError;

pub(super) fn bind_pdfium() -> Result<Pdfium, FileLoaderError> {
    let bindings = Pdfium::bind_to_system_library()
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("pdfium bind failed: {e}")))?;
    Ok(Pdfium::new(bindings))
}
