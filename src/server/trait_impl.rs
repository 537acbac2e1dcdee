use crate::metrics::{generate_request_id, OperationTimer};
use tonic::{Request, Response, Status};
use tracing::instrument;

use super::handlers;
use super::proto::shopping_list_server::ShoppingList;
use super::proto::{
    AddItemRequest, AddItemResponse, DaemonInfo, DeleteItemRequest, DeleteItemResponse,
    EditItemRequest, EditItemResponse, GetDaemonInfoRequest, GetItemsRequest, GetItemsResponse,
    MarkItemCompletedRequest, MarkItemCompletedResponse, ShutdownRequest, ShutdownResponse,
};
use super::ShoppingListService;

/// Flag the timer when a handler reported a domain error in its response.
fn record_outcome(timer: &mut OperationTimer, success: bool) {
    if !success {
        timer.mark_failed();
    }
}

#[tonic::async_trait]
impl ShoppingList for ShoppingListService {
    #[instrument(
        name = "grpc.add_item",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn add_item(
        &self,
        request: Request<AddItemRequest>,
    ) -> Result<Response<AddItemResponse>, Status> {
        let mut timer = OperationTimer::new("add_item");
        let response = handlers::item_add::add_item(&self.store, request.into_inner()).await?;
        record_outcome(&mut timer, response.get_ref().success);
        Ok(response)
    }

    #[instrument(
        name = "grpc.edit_item",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn edit_item(
        &self,
        request: Request<EditItemRequest>,
    ) -> Result<Response<EditItemResponse>, Status> {
        let mut timer = OperationTimer::new("edit_item");
        let response = handlers::item_edit::edit_item(&self.store, request.into_inner()).await?;
        record_outcome(&mut timer, response.get_ref().success);
        Ok(response)
    }

    #[instrument(
        name = "grpc.delete_item",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn delete_item(
        &self,
        request: Request<DeleteItemRequest>,
    ) -> Result<Response<DeleteItemResponse>, Status> {
        let mut timer = OperationTimer::new("delete_item");
        let response =
            handlers::item_delete::delete_item(&self.store, request.into_inner()).await?;
        record_outcome(&mut timer, response.get_ref().success);
        Ok(response)
    }

    #[instrument(
        name = "grpc.mark_item_completed",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn mark_item_completed(
        &self,
        request: Request<MarkItemCompletedRequest>,
    ) -> Result<Response<MarkItemCompletedResponse>, Status> {
        let mut timer = OperationTimer::new("mark_item_completed");
        let response =
            handlers::item_complete::mark_item_completed(&self.store, request.into_inner())
                .await?;
        record_outcome(&mut timer, response.get_ref().success);
        Ok(response)
    }

    #[instrument(
        name = "grpc.get_items",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn get_items(
        &self,
        request: Request<GetItemsRequest>,
    ) -> Result<Response<GetItemsResponse>, Status> {
        let _timer = OperationTimer::new("get_items");
        handlers::item_list::get_items(&self.store, request.into_inner()).await
    }

    async fn get_daemon_info(
        &self,
        request: Request<GetDaemonInfoRequest>,
    ) -> Result<Response<DaemonInfo>, Status> {
        handlers::daemon::get_daemon_info(
            &self.store,
            self.exe_path.as_deref(),
            request.into_inner(),
        )
        .await
    }

    async fn shutdown(
        &self,
        request: Request<ShutdownRequest>,
    ) -> Result<Response<ShutdownResponse>, Status> {
        handlers::daemon::shutdown(request.into_inner(), &self.shutdown_tx).await
    }
}
