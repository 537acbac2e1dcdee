use crate::item::ItemError;

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for ItemError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            ItemError::NotFound(_) => (
                "ITEM_NOT_FOUND",
                Some("The item may have been deleted; refresh the list"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_code() {
        let (code, tip) = ItemError::NotFound(1).error_code_and_tip();
        assert_eq!(code, "ITEM_NOT_FOUND");
        assert!(tip.is_some_and(|t| !t.is_empty()));
    }
}
