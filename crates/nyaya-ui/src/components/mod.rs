pub mod avatar;
pub mod badge;
pub mod bar_chart;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod data_table;
pub mod detail_list;
pub mod filter_tabs;
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod page_header;
pub mod pagination;
pub mod progress;
pub mod search_bar;
pub mod separator;
pub mod sheet;
pub mod sidebar;
pub mod stat_card;
pub mod switch;
pub mod tabs;
pub mod textarea;
pub mod timeline;

pub use avatar::*;
pub use badge::*;
pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use data_table::*;
pub use detail_list::*;
pub use filter_tabs::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use pagination::*;
pub use progress::*;
pub use search_bar::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use stat_card::*;
pub use switch::*;
pub use tabs::*;
pub use textarea::*;
pub use timeline::*;
