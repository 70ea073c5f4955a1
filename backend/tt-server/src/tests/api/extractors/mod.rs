mod account_id;
