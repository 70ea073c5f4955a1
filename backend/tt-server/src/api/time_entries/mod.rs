pub mod time_entries;
pub mod time_entry_dto;
pub mod time_entry_list_response;
