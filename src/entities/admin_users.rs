use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 应用层用户档案，主键与 identities.id 一致
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub surname1: String,
    pub surname2: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    /// 角色列表，如 [{"id":"own","name":"Administrador"}]
    pub roles: Json,
    pub gym_id: i64,
    pub tenant_id: String,
    pub height: i64,
    pub weight: i64,
    pub membership_id: Option<String>,
    pub profile_picture_url: Option<String>,
    pub pin: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
