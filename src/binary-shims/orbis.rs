fn main() {
    orbis_tasks::entry_points::orbis();
}
