mod time_entry;
