pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::account_id::{ACCOUNT_ID_HEADER, AccountId},
    projects::{project_dto::ProjectDto, projects::get_project},
    tasks::{
        move_task_request::MoveTaskRequest,
        task_dto::TaskDto,
        tasks::{get_task, move_task},
    },
    time_entries::{
        time_entries::{list_project_time_entries, list_task_time_entries},
        time_entry_dto::TimeEntryDto,
        time_entry_list_response::TimeEntryListResponse,
    },
    time_tracking::{
        time_tracking::{project_time_tracking, task_time_tracking},
        time_tracking_request::TimeTrackingRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
