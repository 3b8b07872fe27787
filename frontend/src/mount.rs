use thiserror::Error;
use web_sys::Element;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount target #{0} not found")]
    MissingRoot(String),
}

/// Looks up the element the application renders into.
pub fn root_element(id: &str) -> Result<Element, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingRoot(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_names_the_element() {
        let err = MountError::MissingRoot("root".to_string());
        assert_eq!(err.to_string(), "mount target #root not found");
    }

    #[test]
    fn platform_errors_are_readable() {
        assert_eq!(MountError::NoWindow.to_string(), "no browser window available");
        assert_eq!(MountError::NoDocument.to_string(), "window has no document");
    }
}
