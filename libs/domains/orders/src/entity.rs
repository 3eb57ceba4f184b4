//! Sea-ORM entities for the order tables.

pub mod order {
    use crate::models::OrderStatus;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "customer_orders")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        pub lastname: String,
        pub phone: String,
        pub email: String,
        pub company: Option<String>,
        pub address: String,
        pub apartment: Option<String>,
        pub postal_code: String,
        pub city: String,
        pub country: String,
        pub order_notice: Option<String>,
        pub status: OrderStatus,
        pub total: i32,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::item::Entity")]
        Item,
    }

    impl Related<super::item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Item.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod item {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "order_items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub order_id: Uuid,
        pub product_id: Uuid,
        pub quantity: i32,
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderId",
            to = "super::order::Column::Id"
        )]
        Order,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

use sea_orm::ActiveValue::Set;

impl From<order::Model> for crate::models::Order {
    fn from(model: order::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            lastname: model.lastname,
            phone: model.phone,
            email: model.email,
            company: model.company,
            address: model.address,
            apartment: model.apartment,
            postal_code: model.postal_code,
            city: model.city,
            country: model.country,
            order_notice: model.order_notice,
            status: model.status,
            total: model.total,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<item::Model> for crate::models::OrderItem {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
            product: None,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain models to ActiveModels for persistence
impl From<crate::models::Order> for order::ActiveModel {
    fn from(order: crate::models::Order) -> Self {
        Self {
            id: Set(order.id),
            name: Set(order.name),
            lastname: Set(order.lastname),
            phone: Set(order.phone),
            email: Set(order.email),
            company: Set(order.company),
            address: Set(order.address),
            apartment: Set(order.apartment),
            postal_code: Set(order.postal_code),
            city: Set(order.city),
            country: Set(order.country),
            order_notice: Set(order.order_notice),
            status: Set(order.status),
            total: Set(order.total),
            created_at: Set(order.created_at.into()),
            updated_at: Set(order.updated_at.into()),
        }
    }
}

impl From<crate::models::OrderItem> for item::ActiveModel {
    fn from(item: crate::models::OrderItem) -> Self {
        Self {
            id: Set(item.id),
            order_id: Set(item.order_id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            created_at: Set(item.created_at.into()),
        }
    }
}
