use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "server_listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub verified: bool,
    pub tags: String,
    pub owner_id: Option<String>,
    pub guild_id: Option<String>,
    pub last_bump_at: Option<DateTimeUtc>,
    pub bump_count: i32,
    pub auto_update: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bump_event::Entity")]
    BumpEvent,
}

impl Related<super::bump_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BumpEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
