use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok", detail: None }
    }

    pub fn degraded(detail: impl Into<String>) -> Self {
        Self { status: "degraded", detail: Some(detail.into()) }
    }
}
