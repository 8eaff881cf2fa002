pub mod input_view;
pub mod plot_view;

pub use input_view::InputView;
pub use plot_view::PlotView;
