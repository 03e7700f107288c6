pub mod shared {
    pub mod config;
    pub mod core {
        pub mod money;
        pub mod session;
    }
    pub mod infrastructure {
        pub mod identity;
        pub mod supabase;
    }
}

pub mod modules {
    pub mod invoicing {
        pub mod core {
            pub mod document;
            pub mod entry;
            pub mod invoice;
        }
        pub mod use_cases {
            pub mod authenticate {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_unbilled_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod generate_invoices {
                pub mod handler;
                pub mod reconcile;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod document_sink;
                pub mod document_sink_in_memory;
                pub mod document_sink_pdf;
                pub mod entry_store;
                pub mod entry_store_in_memory;
                pub mod entry_store_supabase;
            }
        }
    }
}

pub mod shell;
