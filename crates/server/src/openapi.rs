use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NameInputDoc { pub name: Option<String> }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CreatedDoc { pub message: String, pub id: i64, pub content: String }

#[derive(ToSchema)]
pub struct GreetingDoc { pub id: i64, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::greetings::get_greeting,
        crate::routes::greetings::create_greeting,
        crate::routes::greetings::get_greeting_by_id,
        crate::routes::greetings::list_greetings,
        crate::routes::greetings::update_greeting,
        crate::routes::greetings::delete_greeting,
    ),
    components(
        schemas(
            HealthResponse,
            NameInputDoc,
            MessageDoc,
            CreatedDoc,
            GreetingDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "greetings")
    )
)]
pub struct ApiDoc;
