pub mod codex_display;
pub mod explainer;
pub mod faction_carousel;
pub mod hero_banner;
pub mod operator_detail;
pub mod operator_grid;
pub mod theme;
pub mod tier_board;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use codex_display::{CodexDisplay, CodexDisplayProps};
pub use explainer::{Explainer, ExplainerProps};
pub use faction_carousel::{FactionCarousel, FactionCarouselProps};
pub use hero_banner::{HeroBanner, HeroBannerProps};
pub use operator_detail::{OperatorDetail, OperatorDetailProps};
pub use operator_grid::{OperatorGrid, OperatorGridProps};
pub use tier_board::{TierBoard, TierBoardProps};
