mod configuration;
mod visualization;
