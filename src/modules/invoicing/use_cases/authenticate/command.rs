use crate::shared::infrastructure::identity::{AuthMode, Credentials};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticate {
    pub credentials: Credentials,
    pub mode: AuthMode,
}
