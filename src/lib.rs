pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod external_notification;
        pub mod in_memory_table;
    }
}

pub mod modules {
    pub mod hexagonal {
        pub mod core {
            pub mod events;
            pub mod ports;
            pub mod todo;
            pub mod wire_event;
        }
        pub mod use_cases {
            pub mod manage_todos {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod notification_strategy;
                pub mod use_case_port;
            }
            pub mod receive_todo_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod event_listener;
            }
            pub mod outbound {
                pub mod event_bus_in_process;
                pub mod event_publisher_rest;
                pub mod notification;
                pub mod persistence_in_memory;
            }
        }
    }
    pub mod layered {
        pub mod controller;
        pub mod model;
        pub mod repository;
        pub mod service;
    }
}

pub mod shell;
