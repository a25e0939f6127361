pub mod script {
    pub mod instruction;
    pub mod scripterror;
    pub mod segmentmapmanager;
}

pub mod segment {
    pub mod breakpoint;
    pub mod segmentmap;
    pub mod stepfunction;
}
