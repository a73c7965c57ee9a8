pub mod m202512010001_create_users;
pub mod m202512010002_create_resources;
pub mod m202512010003_create_resource_comments;
pub mod m202512010004_create_weeks;
pub mod m202512010005_create_week_comments;
