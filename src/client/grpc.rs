use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use super::error::ClientError;
use super::transport::ItemTransport;
use crate::item::{ShoppingItem, Timestamp};
use crate::server::convert_entity::proto_to_item;
use crate::server::proto::shopping_list_client::ShoppingListClient;
use crate::server::proto::{
    AddItemRequest, DaemonInfo, DeleteItemRequest, EditItemRequest, GetDaemonInfoRequest,
    GetItemsRequest, MarkItemCompletedRequest, ShutdownRequest, ShutdownResponse,
};
use crate::server::structured_error::error_message;

/// [`ItemTransport`] over the generated gRPC client.
#[derive(Clone)]
pub struct GrpcTransport {
    client: ShoppingListClient<Channel>,
}

/// Turn a `success`/`error` response pair into a result.
fn check(success: bool, error: &str) -> Result<(), ClientError> {
    if success {
        Ok(())
    } else {
        Err(ClientError::Store(error_message(error)))
    }
}

impl GrpcTransport {
    /// Connect to a daemon at `url` (for example `http://127.0.0.1:50051`).
    pub async fn connect(url: String) -> Result<Self, ClientError> {
        let client = ShoppingListClient::connect(url).await?;
        Ok(Self { client })
    }

    /// Build a transport whose connection is only attempted on the first call.
    ///
    /// An unreachable daemon then shows up as a per-action transport error.
    pub fn connect_lazy(url: String) -> Result<Self, ClientError> {
        let endpoint = Endpoint::from_shared(url)
            .map_err(|e| ClientError::InvalidInput(format!("Invalid daemon URL: {e}")))?;
        Ok(Self {
            client: ShoppingListClient::new(endpoint.connect_lazy()),
        })
    }

    #[must_use]
    pub fn new(client: ShoppingListClient<Channel>) -> Self {
        Self { client }
    }

    pub async fn daemon_info(&mut self) -> Result<DaemonInfo, ClientError> {
        let response = self.client.get_daemon_info(GetDaemonInfoRequest {}).await?;
        Ok(response.into_inner())
    }

    pub async fn shutdown(&mut self, delay_seconds: u32) -> Result<ShutdownResponse, ClientError> {
        let response = self
            .client
            .shutdown(ShutdownRequest { delay_seconds })
            .await?;
        Ok(response.into_inner())
    }
}

#[async_trait]
impl ItemTransport for GrpcTransport {
    async fn add_item(
        &mut self,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<u64, ClientError> {
        let resp = self
            .client
            .add_item(AddItemRequest {
                text,
                description,
                due_date,
            })
            .await?
            .into_inner();
        check(resp.success, &resp.error)?;
        Ok(resp.id)
    }

    async fn edit_item(
        &mut self,
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<(), ClientError> {
        let resp = self
            .client
            .edit_item(EditItemRequest {
                id,
                text,
                description,
                due_date,
            })
            .await?
            .into_inner();
        check(resp.success, &resp.error)
    }

    async fn delete_item(&mut self, id: u64) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete_item(DeleteItemRequest { id })
            .await?
            .into_inner();
        check(resp.success, &resp.error)
    }

    async fn mark_item_completed(&mut self, id: u64) -> Result<(), ClientError> {
        let resp = self
            .client
            .mark_item_completed(MarkItemCompletedRequest { id })
            .await?
            .into_inner();
        check(resp.success, &resp.error)
    }

    async fn get_items(&mut self) -> Result<Vec<ShoppingItem>, ClientError> {
        let resp = self.client.get_items(GetItemsRequest {}).await?.into_inner();
        Ok(resp.items.into_iter().map(proto_to_item).collect())
    }
}
