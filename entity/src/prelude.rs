pub use super::activity::Entity as Activity;
pub use super::activity_participant::Entity as ActivityParticipant;
pub use super::album::Entity as Album;
pub use super::announcement::Entity as Announcement;
pub use super::article::Entity as Article;
pub use super::carousel::Entity as Carousel;
pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::material::Entity as Material;
pub use super::system_setting::Entity as SystemSetting;
pub use super::user::Entity as User;
pub use super::work::Entity as Work;
