pub(crate) mod vector3;
