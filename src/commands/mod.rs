pub mod groups;
pub mod init;
pub mod legend;
mod view;

pub use groups::{run_groups, run_groups_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use legend::{run_legend, run_legend_impl};
pub use view::load_bar_data;
