mod call;
mod module;
