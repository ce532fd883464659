use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bump_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: i32,
    pub actor_id: String,
    pub bumped_at: DateTimeUtc,
    pub source: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server_listing::Entity",
        from = "Column::ServerId",
        to = "super::server_listing::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ServerListing,
}

impl Related<super::server_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
