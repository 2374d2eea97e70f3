use thiserror::Error;

/// Caller mistakes rejected before any search runs.
///
/// Failing to find a route is not an error: it is reported as an empty (or
/// partial) route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("{what} must be at least 1, got {value}")]
    InvalidSize { what: &'static str, value: i32 },
    #[error("source is on height {source_height} but destination is on height {destination_height}")]
    HeightMismatch {
        source_height: i32,
        destination_height: i32,
    },
}

impl RouteError {
    pub(crate) fn check_size(what: &'static str, value: i32) -> Result<(), RouteError> {
        if value < 1 {
            return Err(RouteError::InvalidSize { what, value });
        }
        Ok(())
    }

    pub(crate) fn check_height(source_height: i32, destination_height: i32) -> Result<(), RouteError> {
        if source_height != destination_height {
            return Err(RouteError::HeightMismatch {
                source_height,
                destination_height,
            });
        }
        Ok(())
    }
}
