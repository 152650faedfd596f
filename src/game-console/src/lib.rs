pub mod entrypoint;

pub mod model {
    pub mod external;
    pub mod internal;
}

pub mod service {
    pub mod cues;
    pub mod game_console;
    pub mod game_session;
    pub mod sounds;
}
