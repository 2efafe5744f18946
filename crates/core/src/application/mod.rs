pub mod explorer_service;
pub mod external_link_gate;
pub mod shell_router;
pub mod surface_factory;
