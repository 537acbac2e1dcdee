use crate::server::convert_entity::item_to_proto;
use crate::server::proto::{GetItemsRequest, GetItemsResponse};
use crate::server::SharedStore;
use tonic::{Response, Status};

pub async fn get_items(
    store: &SharedStore,
    _req: GetItemsRequest,
) -> Result<Response<GetItemsResponse>, Status> {
    let store = store.read().await;
    let items = store.get_items().iter().map(item_to_proto).collect();
    Ok(Response::new(GetItemsResponse { items }))
}
