mod support;
mod type_mapper;
