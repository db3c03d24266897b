pub mod badge_view;
pub mod config;
pub mod icons;
pub mod layout;
pub mod logging;
pub mod milestone_view;
pub mod model;
pub mod profile_page;
pub mod rank_view;
pub mod sample_data;
pub mod screen;
pub mod team_history;
pub mod theme;
