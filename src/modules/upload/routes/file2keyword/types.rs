pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    /// Multipart body as the decoder sees it. Parts other than `files` are
    /// ignored.
    #[derive(TryFromMultipart)]
    pub struct Form {
        #[form_data(limit = "unlimited")]
        pub files: Vec<FieldData<NamedTempFile>>,
    }

    pub struct Upload {
        pub file_name: String,
        pub contents: NamedTempFile,
    }

    pub struct Payload {
        pub files: Vec<Upload>,
    }

    impl TryFrom<Form> for Payload {
        type Error = super::response::Error;

        fn try_from(form: Form) -> Result<Self, Self::Error> {
            let files = form
                .files
                .into_iter()
                .map(|field| match field.metadata.file_name {
                    Some(file_name) => Ok(Upload {
                        file_name,
                        contents: field.contents,
                    }),
                    None => Err(super::response::Error::MissingFileName),
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Self { files })
        }
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub const ACKNOWLEDGMENT: [&str; 2] = ["ok", "nhe"];

    #[derive(Debug)]
    pub enum Success {
        Acknowledged,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Acknowledged => (StatusCode::OK, Json(ACKNOWLEDGMENT)).into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        MissingFileName,
        FailedToStoreUpload,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFileName => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Uploaded file has no file name" })),
                )
                    .into_response(),
                Self::FailedToStoreUpload => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to store uploaded file" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
