use serde::Serialize;

pub const SAMPLE_AMOUNT: u32 = 3000;
pub const SAMPLE_DESCRIPTION: &str = "Divorce application fee";
pub const SAMPLE_RETURN_URL: &str = "https://localhost:8443/payment-result";
pub const SAMPLE_EMAIL: &str = "test@example.com";
pub const SAMPLE_REFUND_AMOUNT: u32 = 500;
pub const SAMPLE_REFUND_AMOUNT_AVAILABLE: u32 = SAMPLE_AMOUNT;

/// Which reference fields a creation payload carries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReferenceStyle {
    /// A single `reference` field.
    Single,
    /// An `application_reference` / `payment_reference` pair.
    Split,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum PaymentReference {
    Single {
        reference: String,
    },
    Split {
        application_reference: String,
        payment_reference: String,
    },
}

impl PaymentReference {
    /// Builds reference values suffixed with a Unix timestamp in seconds.
    ///
    /// Two payloads built within the same second get identical references.
    pub fn stamped(style: ReferenceStyle, timestamp: i64) -> Self {
        match style {
            ReferenceStyle::Single => PaymentReference::Single {
                reference: format!("reference-{timestamp}"),
            },
            ReferenceStyle::Split => PaymentReference::Split {
                application_reference: format!("application-{timestamp}"),
                payment_reference: format!("payment-{timestamp}"),
            },
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CreatePaymentRequest {
    pub amount: u32,
    #[serde(flatten)]
    pub reference: PaymentReference,
    pub description: String,
    pub return_url: String,
    pub email: String,
}

impl CreatePaymentRequest {
    pub fn sample(style: ReferenceStyle, timestamp: i64) -> Self {
        Self {
            amount: SAMPLE_AMOUNT,
            reference: PaymentReference::stamped(style, timestamp),
            description: SAMPLE_DESCRIPTION.to_string(),
            return_url: SAMPLE_RETURN_URL.to_string(),
            email: SAMPLE_EMAIL.to_string(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct RefundRequest {
    pub amount: u32,
    pub refund_amount_available: u32,
}

impl Default for RefundRequest {
    fn default() -> Self {
        Self {
            amount: SAMPLE_REFUND_AMOUNT,
            refund_amount_available: SAMPLE_REFUND_AMOUNT_AVAILABLE,
        }
    }
}

/// Serializes to `{}`; the service only needs the intent.
#[derive(Debug, Serialize, PartialEq, Clone, Copy, Default)]
pub struct CancelRequest {}

/// Filters accepted by the payments search endpoint. Unset fields are left
/// out of the query string.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SearchCriteria {
    pub amount: Option<u32>,
    pub application_reference: Option<String>,
    pub description: Option<String>,
    pub payment_reference: Option<String>,
    pub created_date: Option<String>,
    pub email: Option<String>,
}

impl SearchCriteria {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let text_fields = [
            ("application_reference", &self.application_reference),
            ("description", &self.description),
            ("payment_reference", &self.payment_reference),
            ("created_date", &self.created_date),
            ("email", &self.email),
        ];

        self.amount
            .map(|amount| ("amount".to_string(), amount.to_string()))
            .into_iter()
            .chain(text_fields.into_iter().filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key.to_string(), v.to_string()))
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_reference_payload() {
        let payload = CreatePaymentRequest::sample(ReferenceStyle::Single, 1_700_000_000);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 3000,
                "reference": "reference-1700000000",
                "description": "Divorce application fee",
                "return_url": "https://localhost:8443/payment-result",
                "email": "test@example.com"
            })
        );
    }

    #[test]
    fn test_split_reference_payload() {
        let payload = CreatePaymentRequest::sample(ReferenceStyle::Split, 1_700_000_000);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["application_reference"], "application-1700000000");
        assert_eq!(value["payment_reference"], "payment-1700000000");
        assert!(value.get("reference").is_none());
    }

    #[test]
    fn test_references_differ_across_seconds() {
        let first = PaymentReference::stamped(ReferenceStyle::Single, 100);
        let second = PaymentReference::stamped(ReferenceStyle::Single, 101);
        assert_ne!(first, second);

        // Same second collides; uniqueness is advisory only.
        let again = PaymentReference::stamped(ReferenceStyle::Single, 100);
        assert_eq!(first, again);
    }

    #[test]
    fn test_refund_payload() {
        let value = serde_json::to_value(RefundRequest::default()).unwrap();
        assert_eq!(value, json!({"amount": 500, "refund_amount_available": 3000}));
    }

    #[test]
    fn test_cancel_payload_is_empty_object() {
        assert_eq!(serde_json::to_string(&CancelRequest {}).unwrap(), "{}");
    }

    #[test]
    fn test_search_query_skips_blank_fields() {
        let criteria = SearchCriteria {
            amount: Some(3000),
            application_reference: Some("  ".to_string()),
            email: Some(" test@example.com ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            criteria.to_query(),
            vec![
                ("amount".to_string(), "3000".to_string()),
                ("email".to_string(), "test@example.com".to_string()),
            ]
        );
        assert!(SearchCriteria::default().to_query().is_empty());
    }
}
