use crate::domain::menu::MenuVariant;
use crate::domain::payload::{CancelRequest, CreatePaymentRequest, RefundRequest, SearchCriteria};
use crate::domain::ports::TransportBox;
use crate::domain::request::ApiRequest;
use crate::error::Result;
use chrono::Utc;
use log::info;
use serde_json::Value;

/// Runs payment operations against the service.
///
/// `Dispatcher` owns the transport for the lifetime of the session and issues
/// calls strictly one at a time. Operations that render something return the
/// decoded JSON; the others return `()`.
pub struct Dispatcher {
    transport: TransportBox,
    variant: MenuVariant,
}

impl Dispatcher {
    /// Creates a new `Dispatcher`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Where requests are sent.
    /// * `variant` - Selects the menu layout and the creation payload shape.
    pub fn new(transport: TransportBox, variant: MenuVariant) -> Self {
        Self { transport, variant }
    }

    pub fn variant(&self) -> MenuVariant {
        self.variant
    }

    pub async fn list_payments(&self) -> Result<Value> {
        self.fetch(ApiRequest::get("")).await
    }

    pub async fn get_payment(&self, id: &str) -> Result<Value> {
        self.fetch(ApiRequest::get(id)).await
    }

    /// Creates a payment whose references are stamped with the current time.
    pub async fn create_payment(&self) -> Result<Value> {
        self.create_payment_at(Utc::now().timestamp()).await
    }

    pub async fn create_payment_at(&self, timestamp: i64) -> Result<Value> {
        let payload = CreatePaymentRequest::sample(self.variant.reference_style(), timestamp);
        let request = ApiRequest::post("", serde_json::to_value(&payload)?);
        self.fetch(request).await
    }

    /// Cancels the payment, then fetches it again to show the new state.
    ///
    /// The cancel reply itself is discarded (the service answers `204`).
    pub async fn cancel_payment(&self, id: &str) -> Result<Value> {
        let request = ApiRequest::post(
            format!("{id}/cancel"),
            serde_json::to_value(CancelRequest::default())?,
        );
        self.transport.send(request).await?;
        info!("cancel accepted for payment {id}");
        self.get_payment(id).await
    }

    pub async fn refund_payment(&self, reference: &str) -> Result<()> {
        let request = ApiRequest::post(
            format!("{reference}/refunds"),
            serde_json::to_value(RefundRequest::default())?,
        );
        self.transport.send(request).await?;
        info!("refund accepted for {reference}");
        Ok(())
    }

    pub async fn search_payments(&self, criteria: &SearchCriteria) -> Result<Value> {
        self.fetch(ApiRequest::get("").with_query(criteria.to_query()))
            .await
    }

    async fn fetch(&self, request: ApiRequest) -> Result<Value> {
        self.transport.send(request).await?.json()
    }
}
