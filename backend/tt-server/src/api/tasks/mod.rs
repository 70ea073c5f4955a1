pub mod move_task_request;
pub mod task_dto;
pub mod tasks;
