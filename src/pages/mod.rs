mod about;
mod contact;
mod features;
mod home;
mod mobile_app;
mod not_found;
mod privacy;
mod status;
mod terms;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use mobile_app::MobileAppPage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPolicyPage;
pub use status::StatusPage;
pub use terms::TermsOfServicePage;
