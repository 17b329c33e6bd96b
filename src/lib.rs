pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod duration;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod timer_lifecycle {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manual_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod aggregation {
                pub mod handler;
                pub mod rollup;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
                pub mod directory_postgres;
                pub mod time_entry_store;
                pub mod time_entry_store_in_memory;
                pub mod time_entry_store_postgres;
            }
        }
    }
}

pub mod shell;
