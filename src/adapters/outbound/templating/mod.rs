/// Template engine adapters
pub(crate) mod builtin;
mod handlebars_renderer;
mod helpers;

pub use handlebars_renderer::HandlebarsRenderer;
