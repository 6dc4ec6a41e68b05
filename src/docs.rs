use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::upload::handler::upload_audio,
    ),
    components(
        schemas(
            crate::modules::upload::dto::UploadResponse,
        )
    ),
    tags(
        (name = "Upload", description = "Audio upload and MP3 conversion")
    )
)]
pub struct ApiDoc;
