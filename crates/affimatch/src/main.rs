fn main() -> anyhow::Result<()> {
    affimatch_lib::main()
}
