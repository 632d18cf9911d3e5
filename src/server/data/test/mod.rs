mod activity;
mod activity_participant;
mod comment;
mod system_setting;
mod user;
mod work;
