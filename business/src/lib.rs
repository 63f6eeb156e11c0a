pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validator;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
