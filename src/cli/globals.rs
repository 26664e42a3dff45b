/// Previous email plus verification token addressing an existing user on
/// the upsert endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTarget {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub base_url: String,
    pub login_enabled: bool,
    pub update: Option<UpdateTarget>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            login_enabled: false,
            update: None,
        }
    }
}
