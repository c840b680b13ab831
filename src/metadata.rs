use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Page metadata the host places in the document head.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

pub const METADATA: Metadata = Metadata {
    title: Cow::Borrowed("Microservices Frontend"),
    description: Cow::Borrowed("Frontend scaffold for microservices-project"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_metadata_values() {
        assert_eq!(METADATA.title, "Microservices Frontend");
        assert_eq!(METADATA.description, "Frontend scaffold for microservices-project");
    }

    #[test]
    fn serializes_both_fields() {
        let value = serde_json::to_value(&METADATA).unwrap();
        assert_eq!(value["title"], "Microservices Frontend");
        assert_eq!(value["description"], "Frontend scaffold for microservices-project");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
