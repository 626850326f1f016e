/*!
# Introductory Tutorial for GASM

Start the console by running `gasm` with no arguments. Every line you type
is one instruction and runs as soon as you press ENTER. Stop a running
program with CTRL-C and leave with CTRL-D.

An instruction is an operation name followed by its parameters. Parameters
are separated by spaces or commas, and everything after a `;` is a comment.

<pre><code>&nbsp;> print hello world       ; comments are ignored
&nbsp;  hello world
&nbsp;> add 40, 2
&nbsp;> print $add
&nbsp;  42
</code></pre>

Results of arithmetic land in registers named after the operation. Registers
start with `$`. Your own values live in variables, which start with `$.`:

<pre><code>&nbsp;> set $.x 10
&nbsp;  = 10
&nbsp;> adds $.x 5
&nbsp;> print $.x
&nbsp;  15
</code></pre>

Drawing works like a pen on a canvas. Move to a point, then draw lines from
it. Negative coordinates count back from the right and bottom edges, so
`-10` is ten pixels from the edge.

<pre><code>&nbsp;> rgba line 255 0 0 1
&nbsp;> path begin
&nbsp;> movp 10 10
&nbsp;> line -10 -10
</code></pre>

Functions are recorded between `func` and `func end` and run with `call`.
The value given to `ret` ends up in `$ret`:

<pre><code>&nbsp;> func seven
&nbsp;. ret 7
&nbsp;. func end
&nbsp;> call seven
&nbsp;  = 7
</code></pre>

While a function is being typed the console collects lines and runs
nothing until `func end`. Longer programs are easier to keep in a file and
run with `gasm program.gasm`.

*/
