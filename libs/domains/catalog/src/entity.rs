//! Sea-ORM entities for the catalog tables.

pub mod category {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "categories")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product::Entity")]
        Product,
    }

    impl Related<super::product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Product.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod product {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub slug: String,
        pub title: String,
        pub description: String,
        pub main_image: String,
        pub price: i32,
        pub rating: i32,
        pub manufacturer: String,
        pub in_stock: i32,
        pub category_id: Uuid,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::category::Entity",
            from = "Column::CategoryId",
            to = "super::category::Column::Id"
        )]
        Category,
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

use sea_orm::ActiveValue::Set;

impl From<category::Model> for crate::models::Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<product::Model> for crate::models::Product {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            description: model.description,
            main_image: model.main_image,
            price: model.price,
            rating: model.rating,
            manufacturer: model.manufacturer,
            in_stock: model.in_stock,
            category_id: model.category_id,
            category: None,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Listing rows come back as (product, joined category)
impl From<(product::Model, Option<category::Model>)> for crate::models::Product {
    fn from((model, category): (product::Model, Option<category::Model>)) -> Self {
        let mut product: Self = model.into();
        product.category = category.map(|c| c.into());
        product
    }
}

// Conversion from domain models to ActiveModels for persistence
impl From<crate::models::Category> for category::ActiveModel {
    fn from(category: crate::models::Category) -> Self {
        Self {
            id: Set(category.id),
            name: Set(category.name),
            created_at: Set(category.created_at.into()),
            updated_at: Set(category.updated_at.into()),
        }
    }
}

impl From<crate::models::Product> for product::ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        Self {
            id: Set(product.id),
            slug: Set(product.slug),
            title: Set(product.title),
            description: Set(product.description),
            main_image: Set(product.main_image),
            price: Set(product.price),
            rating: Set(product.rating),
            manufacturer: Set(product.manufacturer),
            in_stock: Set(product.in_stock),
            category_id: Set(product.category_id),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        }
    }
}
