use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    Forbidden,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let msg_details = match self {
            UserError::UrlNotFound => "resource not found",
            UserError::Forbidden => "forbidden",
        };

        web::HttpResponse::build(self.status_code())
            .json(&serde_json::json!({ "error": msg_details }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::Forbidden => http::StatusCode::FORBIDDEN,
        }
    }
}
