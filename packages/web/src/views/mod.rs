mod sections;
pub use sections::{Analytics, Equipments, Monitoring, Root};

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;
