mod back_nav;
mod footer;
mod nav_bar;
mod trip_card;

pub use back_nav::BackNav;
pub use footer::SiteFooter;
pub use nav_bar::NavBar;
pub use trip_card::TripCard;
