use crate::infrastructure::http::middleware::ApiResult;
use crate::domain::entities::{CreateLabel, CreateWebWidget, Label, WebWidget};
use async_trait::async_trait;

#[async_trait]
pub trait LabelRepository: Send + Sync {
    async fn create_label(&self, create: &CreateLabel) -> ApiResult<Label>;
    async fn get_label(&self, id: &str) -> ApiResult<Option<Label>>;
    async fn create_web_widget(&self, create: &CreateWebWidget) -> ApiResult<WebWidget>;
    async fn get_web_widget(&self, id: &str) -> ApiResult<Option<WebWidget>>;
}
