pub mod action_toolbar;
pub mod event_log;
pub mod hypothesis_card;
pub mod location_map;
pub mod player_avatar;
