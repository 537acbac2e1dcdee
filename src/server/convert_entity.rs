use crate::item::ShoppingItem;

use super::proto::ShoppingItem as ProtoShoppingItem;

pub fn item_to_proto(item: &ShoppingItem) -> ProtoShoppingItem {
    ProtoShoppingItem {
        id: item.id,
        text: item.text.clone(),
        description: item.description.clone(),
        completed: item.completed,
        created_at: item.created_at,
        due_date: item.due_date,
    }
}

pub fn proto_to_item(item: ProtoShoppingItem) -> ShoppingItem {
    ShoppingItem {
        id: item.id,
        text: item.text,
        description: item.description,
        completed: item.completed,
        created_at: item.created_at,
        due_date: item.due_date,
    }
}
