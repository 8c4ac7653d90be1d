fn main() {
    prompt_lab::run()
}
